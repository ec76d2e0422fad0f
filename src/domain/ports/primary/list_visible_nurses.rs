use async_trait::async_trait;
use places::Nurse;
use tracing::warn;

use crate::domain::model::filter::Filter;
use crate::domain::model::query::QueryState;
use crate::domain::ports::secondary::source::Source;

/// Never fails: an unavailable source yields an empty list.
#[async_trait]
pub trait ListVisibleNurses: Sync {
    async fn list_available(&self) -> Vec<Nurse>;

    async fn list_visible(&self, filter: &Filter, state: &QueryState) -> Vec<Nurse> {
        let nurses = self.list_available().await;
        filter.apply(&nurses, state)
    }
}

#[async_trait]
impl<T> ListVisibleNurses for T
where
    T: Source + Send + Sync + ?Sized,
{
    async fn list_available(&self) -> Vec<Nurse> {
        self.list().await.unwrap_or_else(|err| {
            warn!("could not list nurses, showing none: {}", err);
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::secondary::source::Error;
    use places::{Bounds, Coord};

    struct Broken;

    #[async_trait]
    impl Source for Broken {
        async fn list(&self) -> Result<Vec<Nurse>, Error> {
            Err(Error::NurseRetrieval {
                source: "connection refused".into(),
            })
        }
    }

    struct Fixed(Vec<Nurse>);

    #[async_trait]
    impl Source for Fixed {
        async fn list(&self) -> Result<Vec<Nurse>, Error> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn should_degrade_to_empty_list() {
        assert!(Broken.list_available().await.is_empty());
        let visible = Broken
            .list_visible(&Filter::default(), &QueryState::default())
            .await;
        assert!(visible.is_empty());
    }

    #[tokio::test]
    async fn should_filter_listed_nurses() {
        let source = Fixed(vec![
            Nurse::new("in").with_coord(Coord::new(-10., -10.)),
            Nurse::new("out").with_coord(Coord::new(10., 10.)),
        ]);
        let state = QueryState::default()
            .with_viewport_bounds(Bounds::new(Coord::new(0., 0.), Coord::new(-30., -50.)));
        let visible = source.list_visible(&Filter::default(), &state).await;
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "in");
    }
}
