//! Browser entry point for the orderdesk dashboard
#![forbid(unsafe_code)]

fn main() {
    leptos::mount::mount_to_body(orderdesk_web::App);
}
