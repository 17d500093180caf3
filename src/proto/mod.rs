// Generated by build.rs into this directory

pub mod common {
    include!("freight.common.rs");
}

pub mod inventory {
    include!("freight.inventory.rs");
}

pub mod maintenance {
    include!("freight.maintenance.rs");
}

pub mod quotes {
    include!("freight.quotes.rs");
}

pub mod orders {
    include!("freight.orders.rs");
}

pub mod documents {
    include!("freight.documents.rs");
}

pub mod notifications {
    include!("freight.notifications.rs");
}

pub mod health {
    include!("grpc.health.v1.rs");
}
