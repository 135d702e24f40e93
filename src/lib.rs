pub mod shared {
    pub mod infrastructure {
        pub mod config;
        pub mod http_response;
    }
}

pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod catalog;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod list_activities {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod sign_up_for_activity {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod unregister_from_activity {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod registry;
                pub mod registry_in_memory;
            }
        }
    }
}

pub mod shell;
