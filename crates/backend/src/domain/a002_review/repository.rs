use crate::shared::data::mock::MockRecordSource;
use crate::shared::date_utils::utc_at;
use contracts::domain::a002_review::aggregate::{Review, ReviewId, ReviewStatus};
use once_cell::sync::Lazy;
use uuid::Uuid;

fn review(
    n: u128,
    hotel_name: &str,
    guest_name: &str,
    order_no: Option<&str>,
    rating: i32,
    content: &str,
    status: ReviewStatus,
) -> Review {
    let mut review = Review::new_for_insert(
        format!("RV-{:05}", n),
        hotel_name.to_string(),
        guest_name.to_string(),
        order_no.map(str::to_string),
        rating,
        content.to_string(),
        utc_at(2024, 4, n as u32, 20, 15),
    );
    review.base.id = ReviewId::new(Uuid::from_u128(0xa002_0000 + n));
    review.status = status;
    review
}

static REVIEWS: Lazy<Vec<Review>> = Lazy::new(|| {
    let mut reviews = vec![
        review(1, "西湖国宾馆", "张三", Some("HO-2024-0001"), 5, "环境优美，服务周到，早餐丰富", ReviewStatus::Pending),
        review(2, "外滩半岛酒店", "王五", Some("HO-2024-0003"), 2, "隔音太差，整晚都能听到走廊的声音", ReviewStatus::Pending),
        review(3, "外滩半岛酒店", "Zhang Wei", Some("HO-2024-0004"), 5, "Great view of the Bund, friendly staff", ReviewStatus::Approved),
        review(4, "鼓浪屿海景民宿", "匿名用户", None, 1, "广告内容 加微信领优惠", ReviewStatus::Rejected),
        review(5, "西湖国宾馆", "孙八", None, 4, "位置方便，房间略小", ReviewStatus::Approved),
        review(6, "鼓浪屿海景民宿", "赵六", Some("HO-2024-0005"), 3, "海景不错，但热水不稳定", ReviewStatus::Hidden),
    ];
    reviews[2].reply = Some("感谢您的好评，期待再次光临".to_string());
    reviews
});

/// Static review snapshot the console starts from
pub fn mock_records() -> Vec<Review> {
    REVIEWS.clone()
}

pub fn mock_source() -> MockRecordSource<Review> {
    MockRecordSource::new(mock_records())
}
