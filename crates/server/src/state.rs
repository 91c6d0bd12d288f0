use std::sync::Arc;

use service::customer::{repository::CustomerRepository, CustomerService};

/// Shared handler state: the write service over whichever store was wired in.
#[derive(Clone)]
pub struct ServerState {
    pub customers: Arc<CustomerService<dyn CustomerRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customers: Arc::new(CustomerService::new(repo)) }
    }
}
