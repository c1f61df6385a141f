pub mod ai;
pub mod auth;
pub mod bids;
pub mod categories;
pub mod chat;
pub mod dashboard;
pub mod jobs;
pub mod notifications;
pub mod tools;
pub mod transactions;
pub mod users;

use actix_web::web;

use crate::ws::session::ws_connect;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth (protected by JWT via the AuthenticatedUser extractor) ──
    cfg.service(web::resource("/auth/user").route(web::get().to(auth::current_user)));

    // ── Users & worker directory ──
    cfg.service(web::resource("/users/profile").route(web::patch().to(users::update_profile)));
    cfg.service(web::resource("/users/{id}").route(web::get().to(users::get_user)));
    cfg.service(web::resource("/workers").route(web::get().to(users::get_workers)));

    // ── Jobs & bidding ──
    cfg.service(
        web::scope("/jobs")
            .route("", web::get().to(jobs::get_jobs))
            .route("", web::post().to(jobs::create_job))
            .route("/{id}", web::get().to(jobs::get_job))
            .route("/{id}", web::patch().to(jobs::update_job))
            .route("/{id}/bids", web::get().to(jobs::get_job_bids))
            .route("/{id}/bids", web::post().to(bids::create_bid)),
    );
    cfg.service(
        web::scope("/bids")
            .route("", web::get().to(bids::get_my_bids))
            .route("/{id}", web::patch().to(bids::update_bid_status)),
    );

    // ── Equipment rental listings ──
    cfg.service(
        web::scope("/tools")
            .route("", web::get().to(tools::get_tools))
            .route("", web::post().to(tools::create_tool))
            .route("/{id}", web::get().to(tools::get_tool))
            .route("/{id}", web::patch().to(tools::update_tool)),
    );

    // ── Categories (public) ──
    cfg.service(
        web::resource("/job-categories").route(web::get().to(categories::get_job_categories)),
    );
    cfg.service(
        web::resource("/tool-categories").route(web::get().to(categories::get_tool_categories)),
    );

    // ── Messaging ──
    cfg.service(
        web::scope("/conversations")
            .route("", web::get().to(chat::get_conversations))
            .route("", web::post().to(chat::create_conversation))
            .route("/{id}/messages", web::get().to(chat::get_messages))
            .route("/{id}/messages", web::post().to(chat::send_message)),
    );

    // ── Wallet & payments ──
    cfg.service(
        web::scope("/transactions")
            .route("", web::get().to(transactions::get_transactions))
            .route("", web::post().to(transactions::create_transaction)),
    );
    cfg.service(
        web::scope("/payments")
            .route("/create-order", web::post().to(transactions::create_order))
            .route("/verify", web::post().to(transactions::verify_payment)),
    );

    // ── Notifications ──
    cfg.service(
        web::scope("/notifications")
            .route("", web::get().to(notifications::get_notifications))
            .route("/{id}/read", web::patch().to(notifications::mark_read)),
    );

    // ── Dashboard ──
    cfg.service(web::resource("/dashboard/stats").route(web::get().to(dashboard::get_stats)));

    // ── AI assistance ──
    cfg.service(
        web::scope("/ai")
            .route("/match-workers", web::post().to(ai::match_workers))
            .route("/chat", web::post().to(ai::chat_assistant)),
    );

    // ── Real-time push (WebSocket upgrade) ──
    cfg.service(web::resource("/ws").route(web::get().to(ws_connect)));
}
