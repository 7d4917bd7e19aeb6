pub mod error;

pub mod raffle {
    pub mod msg;
    pub mod types;
}

pub mod vrf_coordinator {
    pub mod msg;
    pub mod state;
    pub mod types;
}
