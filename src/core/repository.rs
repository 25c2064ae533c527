use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // creates an entity and returns it with its assigned id
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // replaces the entity with the same id in place
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete an entity and return it
    async fn delete(&self, id: i64) -> LibraryResult<Entity>;

    // all entities in insertion order
    async fn list(&self) -> LibraryResult<Vec<Entity>>;
}
