use backend::shared::config;
use backend::shared::data::RecordCollection;
use backend::shared::list::Searchable;
use backend::system;
use contracts::domain::common::{Lifecycle, Stateful};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;
    system::tracing::initialize(&config.logging)?;

    let console = backend::initialize_console(&config).await?;

    log_status_counts(&console.orders);
    log_status_counts(&console.reviews);
    log_status_counts(&console.audits);
    log_status_counts(&console.leads);
    log_status_counts(&console.rooms);
    log_status_counts(&console.promotions);

    Ok(())
}

fn log_status_counts<R>(collection: &RecordCollection<R>)
where
    R: Stateful + Searchable + Send + Sync + 'static,
{
    let counts = collection
        .status_counts()
        .into_iter()
        .map(|(status, count)| format!("{} {}", status.label(), count))
        .collect::<Vec<_>>()
        .join(", ");
    tracing::info!("{}: {}", R::list_name(), counts);
}
