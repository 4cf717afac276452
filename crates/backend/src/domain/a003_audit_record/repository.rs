use crate::shared::data::mock::MockRecordSource;
use crate::shared::date_utils::utc_at;
use contracts::domain::a003_audit_record::aggregate::{
    AuditChange, AuditRecord, AuditRecordId, AuditStatus, AuditType,
};
use once_cell::sync::Lazy;
use serde_json::json;
use uuid::Uuid;

fn record(
    day: u32,
    audit_type: AuditType,
    merchant_name: &str,
    submitter: &str,
    change: Option<AuditChange>,
    status: AuditStatus,
) -> AuditRecord {
    let mut record = AuditRecord::new_for_insert(
        format!("AU-202404{:02}", day),
        audit_type,
        merchant_name.to_string(),
        submitter.to_string(),
        change,
        utc_at(2024, 4, day, 11, 0),
    );
    record.base.id = AuditRecordId::new(Uuid::from_u128(0xa003_0000 + day as u128));
    record.status = status;
    record
}

static RECORDS: Lazy<Vec<AuditRecord>> = Lazy::new(|| {
    vec![
        record(
            1,
            AuditType::MerchantProfile,
            "西湖国宾馆",
            "xihu_admin",
            Some(AuditChange::update(
                json!({ "phone": "0571-87000000", "address": "杭州市西湖区杨公堤18号" }),
                json!({ "phone": "0571-87001111", "address": "杭州市西湖区杨公堤18号" }),
            )),
            AuditStatus::Pending,
        ),
        record(
            2,
            AuditType::RoomInfo,
            "外滩半岛酒店",
            "bund_ops",
            Some(AuditChange::creation(
                json!({ "room_type": "江景套房", "area": 68, "max_guests": 3 }),
            )),
            AuditStatus::Pending,
        ),
        record(
            3,
            AuditType::Promotion,
            "鼓浪屿海景民宿",
            "gly_owner",
            Some(AuditChange::creation(
                json!({ "name": "五一连住优惠", "discount": 0.85 }),
            )),
            AuditStatus::Approved,
        ),
        record(
            4,
            AuditType::Qualification,
            "山野小院",
            "shanye",
            None,
            AuditStatus::Rejected,
        ),
        record(
            5,
            AuditType::RoomInfo,
            "西湖国宾馆",
            "xihu_admin",
            Some(AuditChange::update(
                json!({ "price": 688 }),
                json!({ "price": 728 }),
            )),
            AuditStatus::Approved,
        ),
    ]
});

/// Static audit queue snapshot the console starts from
pub fn mock_records() -> Vec<AuditRecord> {
    RECORDS.clone()
}

pub fn mock_source() -> MockRecordSource<AuditRecord> {
    MockRecordSource::new(mock_records())
}
