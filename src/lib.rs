pub mod shared {
    pub mod core {
        pub mod rule_chain;
    }
}

pub mod modules {
    pub mod books {
        pub mod core {
            pub mod book;
            pub mod failure;
            pub mod ports;
            pub mod validation;
        }
        pub mod application {
            pub mod book_service;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod book_store_in_memory;
            }
        }
    }
}

pub mod shell;
