use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::logs::publisher::LogsPublisher;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(config);
    Box::new(CatalogServiceImpl::new(config, book_repo, Box::new(LogsPublisher::new())))
}
