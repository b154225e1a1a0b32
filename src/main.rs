use rusty_pong::args::{self, StoreKind};
use rusty_pong::controller::matches::{add, delete, matches};
use rusty_pong::controller::seed;
use rusty_pong::model::sheet_header;
use rusty_pong::storage::{MemorySheet, SheetStore, SqliteSheet};
use rusty_pong::view::index::{fragment_url, render_index_template};

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, Responder, web};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = args::args_checks();

    let store: Arc<dyn SheetStore> = match args.store {
        StoreKind::Memory => Arc::new(MemorySheet::new(sheet_header())),
        StoreKind::Sqlite => {
            let sheet = SqliteSheet::open(&args.sheet_name, sheet_header());
            match sheet {
                Ok(sheet) => Arc::new(sheet),
                Err(e) => {
                    eprintln!("Error opening sheet '{}': {e}", args.sheet_name);
                    std::process::exit(1);
                }
            }
        }
    };

    if let Some(json) = &args.seed_json {
        seed::seed_sheet(store.as_ref(), json).await?;
    }

    let store_for_web = Data::from(store);
    HttpServer::new(move || {
        App::new()
            .app_data(store_for_web.clone())
            .route("/", web::get().to(index))
            .route("/matches", web::get().to(matches))
            .route("/matches/add", web::post().to(add))
            .route("/matches/delete", web::post().to(delete))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static").show_files_listing()) // Serve the static files
    })
    .bind("0.0.0.0:8081")?
    .run()
    .await?;
    Ok(())
}

async fn index(req: HttpRequest) -> impl Responder {
    let fragment = fragment_url(req.query_string());
    let markup = render_index_template("Suivi des matchs de Ping-Pong", &fragment);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
