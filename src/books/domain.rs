use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn rating(&self) -> i64;
    fn has_rating(&self, rating: i64) -> bool {
        self.rating() == rating
    }
}
