pub mod a001_hotel_order;
pub mod a002_review;
pub mod a003_audit_record;
pub mod a004_lead;
pub mod a005_room;
pub mod a006_promotion;
pub mod common;
