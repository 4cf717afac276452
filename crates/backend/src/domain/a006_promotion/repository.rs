use crate::shared::data::mock::MockRecordSource;
use crate::shared::date_utils::{utc_at, ymd};
use contracts::domain::a006_promotion::aggregate::{
    Promotion, PromotionId, PromotionStats, PromotionStatus,
};
use once_cell::sync::Lazy;
use uuid::Uuid;

#[allow(clippy::too_many_arguments)]
fn promotion(
    n: u128,
    name: &str,
    hotel_name: &str,
    promotion_type: &str,
    start: (u32, u32),
    end: (u32, u32),
    budget: f64,
    stats: PromotionStats,
    status: PromotionStatus,
) -> Promotion {
    let mut promotion = Promotion::new_for_insert(
        format!("PM-{:04}", n),
        name.to_string(),
        hotel_name.to_string(),
        promotion_type.to_string(),
        ymd(2024, start.0, start.1),
        ymd(2024, end.0, end.1),
        budget,
        utc_at(2024, 3, 20 + n as u32, 10, 0),
    );
    promotion.base.id = PromotionId::new(Uuid::from_u128(0xa006_0000 + n));
    promotion.stats = stats;
    promotion.status = status;
    promotion
}

fn stats(impressions: i64, clicks: i64, orders: i64, spent: f64) -> PromotionStats {
    PromotionStats {
        impressions,
        clicks,
        orders,
        spent,
    }
}

static PROMOTIONS: Lazy<Vec<Promotion>> = Lazy::new(|| {
    vec![
        promotion(1, "五一连住特惠", "西湖国宾馆", "discount", (4, 20), (5, 5), 5000.0, stats(0, 0, 0, 0.0), PromotionStatus::Pending),
        promotion(2, "春季首页推荐位", "外滩半岛酒店", "banner", (3, 25), (4, 30), 12000.0, stats(86000, 2580, 96, 7450.0), PromotionStatus::Active),
        promotion(3, "海景房早鸟价", "鼓浪屿海景民宿", "early_bird", (5, 1), (6, 30), 3000.0, stats(0, 0, 0, 0.0), PromotionStatus::Pending),
        promotion(4, "周末搜索置顶", "西湖国宾馆", "search_top", (3, 22), (4, 21), 8000.0, stats(42000, 1890, 55, 5200.0), PromotionStatus::Paused),
        promotion(5, "清明假期满减", "外滩半岛酒店", "discount", (4, 1), (4, 7), 4000.0, stats(31000, 620, 41, 4000.0), PromotionStatus::Ended),
        promotion(6, "端午亲子套餐", "鼓浪屿海景民宿", "package", (6, 8), (6, 10), 2000.0, stats(0, 0, 0, 0.0), PromotionStatus::Rejected),
    ]
});

/// Static promotion snapshot the console starts from
pub fn mock_records() -> Vec<Promotion> {
    PROMOTIONS.clone()
}

pub fn mock_source() -> MockRecordSource<Promotion> {
    MockRecordSource::new(mock_records())
}
