pub mod contract;
pub mod helpers;

pub mod actions {
    pub mod execute;
    pub mod instantiate;
    pub mod other;
    pub mod query;
}
