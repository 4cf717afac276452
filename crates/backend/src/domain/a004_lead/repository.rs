use crate::shared::data::mock::MockRecordSource;
use crate::shared::date_utils::utc_at;
use contracts::domain::a004_lead::aggregate::{Lead, LeadId, LeadSource, LeadStatus};
use once_cell::sync::Lazy;
use uuid::Uuid;

struct LeadSeed {
    contact_name: &'static str,
    phone: &'static str,
    company: &'static str,
    city: Option<&'static str>,
    source: LeadSource,
    owner: Option<&'static str>,
    room_count: Option<i32>,
    status: LeadStatus,
}

fn lead(n: u128, seed: LeadSeed) -> Lead {
    let mut lead = Lead::new_for_insert(
        format!("LD-{:04}", n),
        seed.contact_name.to_string(),
        seed.phone.to_string(),
        seed.company.to_string(),
        seed.source,
        utc_at(2024, 2, n as u32, 16, 45),
    );
    lead.base.id = LeadId::new(Uuid::from_u128(0xa004_0000 + n));
    lead.city = seed.city.map(str::to_string);
    lead.owner = seed.owner.map(str::to_string);
    lead.room_count = seed.room_count;
    lead.status = seed.status;
    lead
}

static LEADS: Lazy<Vec<Lead>> = Lazy::new(|| {
    vec![
        lead(1, LeadSeed {
            contact_name: "张三",
            phone: "13800138000",
            company: "西湖国宾馆",
            city: Some("杭州"),
            source: LeadSource::Website,
            owner: None,
            room_count: Some(120),
            status: LeadStatus::Pending,
        }),
        lead(2, LeadSeed {
            contact_name: "ZhangSan",
            phone: "13911112222",
            company: "Riverside Hostel",
            city: Some("上海"),
            source: LeadSource::Exhibition,
            owner: Some("sales_li"),
            room_count: Some(24),
            status: LeadStatus::Following,
        }),
        lead(3, LeadSeed {
            contact_name: "zhangsan",
            phone: "13722223333",
            company: "Mountain Lodge",
            city: None,
            source: LeadSource::ColdCall,
            owner: None,
            room_count: None,
            status: LeadStatus::Pending,
        }),
        lead(4, LeadSeed {
            contact_name: "李娜",
            phone: "13633334444",
            company: "灵隐禅意客栈",
            city: Some("杭州"),
            source: LeadSource::Referral,
            owner: Some("sales_wang"),
            room_count: Some(18),
            status: LeadStatus::Converted,
        }),
        lead(5, LeadSeed {
            contact_name: "陈晨",
            phone: "13544445555",
            company: "鼓浪屿海景民宿",
            city: Some("厦门"),
            source: LeadSource::Website,
            owner: Some("sales_li"),
            room_count: Some(9),
            status: LeadStatus::Failed,
        }),
        lead(6, LeadSeed {
            contact_name: "test",
            phone: "00000000000",
            company: "test",
            city: None,
            source: LeadSource::Website,
            owner: None,
            room_count: None,
            status: LeadStatus::Invalid,
        }),
    ]
});

/// Static lead snapshot the console starts from
pub fn mock_records() -> Vec<Lead> {
    LEADS.clone()
}

pub fn mock_source() -> MockRecordSource<Lead> {
    MockRecordSource::new(mock_records())
}
