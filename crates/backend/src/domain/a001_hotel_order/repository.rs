use crate::shared::data::mock::MockRecordSource;
use crate::shared::date_utils::{utc_at, ymd};
use contracts::domain::a001_hotel_order::aggregate::{
    HotelOrder, HotelOrderId, HotelOrderStay, OrderStatus,
};
use once_cell::sync::Lazy;
use uuid::Uuid;

fn order(
    n: u128,
    guest_name: &str,
    phone: &str,
    stay: HotelOrderStay,
    amount: f64,
    channel: &str,
    status: OrderStatus,
) -> HotelOrder {
    let mut order = HotelOrder::new_for_insert(
        format!("HO-2024-{:04}", n),
        guest_name.to_string(),
        phone.to_string(),
        stay,
        amount,
        channel.to_string(),
        utc_at(2024, 3, n as u32, 9, 30),
    );
    order.base.id = HotelOrderId::new(Uuid::from_u128(0xa001_0000 + n));
    order.status = status;
    order
}

fn stay(hotel_name: &str, room_type: &str, check_in: u32, nights: u32, room_count: i32) -> HotelOrderStay {
    HotelOrderStay {
        hotel_name: hotel_name.to_string(),
        room_type: room_type.to_string(),
        check_in: ymd(2024, 4, check_in),
        check_out: ymd(2024, 4, check_in + nights),
        room_count,
    }
}

static ORDERS: Lazy<Vec<HotelOrder>> = Lazy::new(|| {
    vec![
        order(1, "张三", "13800138001", stay("西湖国宾馆", "豪华大床房", 2, 2, 1), 1376.0, "app", OrderStatus::Pending),
        order(2, "李四", "13900139002", stay("西湖国宾馆", "行政套房", 3, 1, 1), 2280.0, "mini_program", OrderStatus::Confirmed),
        order(3, "王五", "13700137003", stay("外滩半岛酒店", "标准双床房", 5, 3, 2), 5340.0, "ota", OrderStatus::Cancelled),
        order(4, "Zhang Wei", "13600136004", stay("外滩半岛酒店", "豪华大床房", 6, 2, 1), 2560.0, "app", OrderStatus::Completed),
        order(5, "赵六", "13500135005", stay("鼓浪屿海景民宿", "海景房", 8, 4, 1), 2392.0, "ota", OrderStatus::Pending),
        order(6, "钱七", "13400134006", stay("鼓浪屿海景民宿", "家庭房", 10, 2, 2), 1856.0, "phone", OrderStatus::Confirmed),
        order(7, "孙八", "13300133007", stay("西湖国宾馆", "豪华大床房", 12, 1, 1), 688.0, "app", OrderStatus::Pending),
        order(8, "Emily Chen", "13200132008", stay("外滩半岛酒店", "行政套房", 15, 2, 1), 5120.0, "ota", OrderStatus::Completed),
    ]
});

/// Static order snapshot the console starts from
pub fn mock_records() -> Vec<HotelOrder> {
    ORDERS.clone()
}

pub fn mock_source() -> MockRecordSource<HotelOrder> {
    MockRecordSource::new(mock_records())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::AggregateRoot;

    #[test]
    fn test_mock_orders_are_valid_and_stable() {
        let first = mock_records();
        let second = mock_records();
        assert_eq!(first, second);
        for order in &first {
            assert!(order.validate().is_ok(), "{} is invalid", order.code());
        }
    }
}
