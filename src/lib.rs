pub mod shared {
    pub mod core {
        pub mod clock;
    }
}

pub mod modules {
    pub mod registrations {
        pub mod core {
            pub mod fields;
            pub mod ports;
            pub mod registration_row;
            pub mod rules;
            pub mod submission;
        }
        pub mod use_cases {
            pub mod register_submission {
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_registrations {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod html_page;
                pub mod in_memory_page;
            }
        }
    }
}

pub mod shell;
