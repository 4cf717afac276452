use crate::domain::{
    a001_hotel_order, a002_review, a003_audit_record, a004_lead, a005_room, a006_promotion,
};
use crate::shared::config::{Config, ListConfig};
use crate::shared::data::mock::{InMemoryPersistence, TracingNotifier};
use crate::shared::data::{Notifier, RecordCollection, RecordSource};
use crate::shared::list::Searchable;
use contracts::domain::a001_hotel_order::aggregate::HotelOrder;
use contracts::domain::a002_review::aggregate::Review;
use contracts::domain::a003_audit_record::aggregate::AuditRecord;
use contracts::domain::a004_lead::aggregate::Lead;
use contracts::domain::a005_room::aggregate::Room;
use contracts::domain::a006_promotion::aggregate::Promotion;
use contracts::domain::common::Stateful;
use contracts::shared::list::ViewState;
use std::sync::Arc;

/// Все коллекции бэк-офиса, загруженные и готовые для списков и действий
pub struct AdminConsole {
    pub list: ListConfig,
    pub orders: RecordCollection<HotelOrder>,
    pub reviews: RecordCollection<Review>,
    pub audits: RecordCollection<AuditRecord>,
    pub leads: RecordCollection<Lead>,
    pub rooms: RecordCollection<Room>,
    pub promotions: RecordCollection<Promotion>,
}

impl AdminConsole {
    /// Новое состояние списка с размером страницы из конфига
    pub fn view_state(&self) -> ViewState {
        ViewState::new(self.list.default_page_size)
    }

    /// Есть ли `page_size` среди вариантов размера страницы
    pub fn is_page_size_option(&self, page_size: usize) -> bool {
        self.list.page_size_options.contains(&page_size)
    }
}

/// Загрузка всех коллекций из статических mock-источников. Изменения
/// хранятся в памяти, уведомления пишутся в лог.
pub async fn initialize_console(config: &Config) -> anyhow::Result<AdminConsole> {
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);

    let console = AdminConsole {
        list: config.list.clone(),
        orders: load(a001_hotel_order::repository::mock_source(), &notifier).await?,
        reviews: load(a002_review::repository::mock_source(), &notifier).await?,
        audits: load(a003_audit_record::repository::mock_source(), &notifier).await?,
        leads: load(a004_lead::repository::mock_source(), &notifier).await?,
        rooms: load(a005_room::repository::mock_source(), &notifier).await?,
        promotions: load(a006_promotion::repository::mock_source(), &notifier).await?,
    };

    tracing::info!(
        "Console ready: {} orders, {} reviews, {} audits, {} leads, {} rooms, {} promotions",
        console.orders.len(),
        console.reviews.len(),
        console.audits.len(),
        console.leads.len(),
        console.rooms.len(),
        console.promotions.len()
    );

    Ok(console)
}

async fn load<R>(
    source: impl RecordSource<R> + 'static,
    notifier: &Arc<dyn Notifier>,
) -> anyhow::Result<RecordCollection<R>>
where
    R: Stateful + Searchable + Send + Sync + 'static,
{
    RecordCollection::load(
        Arc::new(source),
        Arc::new(InMemoryPersistence::<R>::new()),
        notifier.clone(),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_hotel_order::service as orders;
    use crate::shared::config::LoggingConfig;
    use contracts::domain::a001_hotel_order::aggregate::OrderStatus;
    use contracts::domain::common::{Lifecycle, TransitionMeta};

    fn config() -> Config {
        Config {
            list: ListConfig {
                default_page_size: 5,
                page_size_options: vec![5, 10],
            },
            logging: LoggingConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_console_loads_every_collection() {
        let console = initialize_console(&config()).await.unwrap();
        assert!(!console.orders.is_empty());
        assert!(!console.reviews.is_empty());
        assert!(!console.audits.is_empty());
        assert!(!console.leads.is_empty());
        assert!(!console.rooms.is_empty());
        assert!(!console.promotions.is_empty());
        assert!(console.is_page_size_option(10));
        assert!(!console.is_page_size_option(20));
    }

    #[tokio::test]
    async fn test_first_page_uses_configured_size() {
        let console = initialize_console(&config()).await.unwrap();
        let page = console.orders.render(&console.view_state()).unwrap();
        assert_eq!(page.page_size, 5);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total, console.orders.len());
    }

    #[tokio::test]
    async fn test_action_is_visible_in_next_render() {
        let mut console = initialize_console(&config()).await.unwrap();
        let mut state = console.view_state();
        state.set_filter("status", Some(OrderStatus::Pending.code().into()));

        let before = console.orders.render(&state).unwrap();
        let id = before.items[0].base.id;

        orders::confirm(&mut console.orders, id, TransitionMeta::new())
            .await
            .unwrap();

        let after = console.orders.render(&state).unwrap();
        assert_eq!(after.total, before.total - 1);
        assert!(after.items.iter().all(|o| o.base.id != id));
    }

    #[tokio::test]
    async fn test_emptied_last_page_falls_back_to_first() {
        let mut console = initialize_console(&config()).await.unwrap();
        let mut state = console.view_state();
        state.set_page_size(2);
        state.set_filter("status", Some(OrderStatus::Pending.code().into()));
        state.set_page(2);

        let before = console.orders.render(&state).unwrap();
        assert_eq!((before.total, before.total_pages), (3, 2));
        assert_eq!(before.items.len(), 1);
        let id = before.items[0].base.id;

        orders::confirm(&mut console.orders, id, TransitionMeta::new())
            .await
            .unwrap();

        let after = console.orders.render(&state).unwrap();
        assert_eq!(after.page, 1);
        assert_eq!((after.total, after.total_pages), (2, 1));
        assert_eq!(after.items.len(), 2);
        assert!(after.items.iter().all(|o| o.status == OrderStatus::Pending));

        assert!(state.clamp_to(after.total));
        assert_eq!(state.page, 1);
    }
}
