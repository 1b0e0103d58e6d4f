//! Single binary web server: HTML page at /, its script under /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, SCHEDULE_FILE,
//! SCHEDULE_VARIANT (fixed-opening | load-balanced | seeded), DEFAULT_TEAMS.

use actix_files::Files;
use actix_web::{
    get, post, put,
    web::{self, Data, Path},
    App, HttpResponse, HttpServer, Responder,
};
use court_schedule::{
    clamp_team_count, Config, JsonFileStore, Planner, ScheduleError, Variant, MAX_TEAMS,
    MIN_TEAMS,
};
use serde::Deserialize;
use std::sync::RwLock;

/// Single writer: every mutation goes through the write lock.
type AppState = Data<RwLock<Planner<JsonFileStore>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(serde::Serialize)]
struct SettingsResponse {
    variant: Variant,
    default_teams: u32,
    min_teams: u32,
    max_teams: u32,
}

/// Path segment: team count (e.g. /api/schedules/{teams}). Clamped into the supported range.
#[derive(Deserialize)]
struct TeamsPath {
    teams: u32,
}

/// Path segments: team count, round index and court index (both 0-based).
#[derive(Deserialize)]
struct MatchPath {
    teams: u32,
    round: usize,
    court: usize,
}

fn error_response(e: ScheduleError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        ScheduleError::InvalidArgument { .. } | ScheduleError::MatchNotFound { .. } => {
            HttpResponse::BadRequest().json(body)
        }
        _ => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "court-schedule",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Settings the page needs before it asks for a schedule.
#[get("/api/settings")]
async fn api_settings(state: AppState, config: Data<Config>) -> HttpResponse {
    let variant = match state.read() {
        Ok(guard) => guard.variant(),
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(SettingsResponse {
        variant,
        default_teams: config.default_teams,
        min_teams: MIN_TEAMS,
        max_teams: MAX_TEAMS,
    })
}

/// Get the schedule for a team count, generating and storing it if none is stored.
#[get("/api/schedules/{teams}")]
async fn api_get_schedule(state: AppState, path: Path<TeamsPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.open(clamp_team_count(path.teams)) {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => error_response(e),
    }
}

/// Regenerate: same pairing as before for this team count, all completion flags cleared.
#[post("/api/schedules/{teams}/regenerate")]
async fn api_regenerate(state: AppState, path: Path<TeamsPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.regenerate(clamp_team_count(path.teams)) {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => error_response(e),
    }
}

/// Flip one match between complete and incomplete.
#[put("/api/schedules/{teams}/rounds/{round}/courts/{court}/toggle")]
async fn api_toggle_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.toggle(clamp_team_count(path.teams), path.round, path.court) {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => error_response(e),
    }
}

/// Mark every match incomplete (schedule unchanged).
#[post("/api/schedules/{teams}/reset")]
async fn api_reset(state: AppState, path: Path<TeamsPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.reset(clamp_team_count(path.teams)) {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => error_response(e),
    }
}

#[get("/api/schedules/{teams}/progress")]
async fn api_progress(state: AppState, path: Path<TeamsPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.progress(clamp_team_count(path.teams)) {
        Ok(progress) => HttpResponse::Ok().json(progress),
        Err(e) => error_response(e),
    }
}

#[get("/api/schedules/{teams}/export.csv")]
async fn api_export_csv(state: AppState, path: Path<TeamsPath>) -> HttpResponse {
    let teams = clamp_team_count(path.teams);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.export_csv(teams) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"schedule-{}-teams.csv\"", teams),
            ))
            .body(csv),
        Err(e) => error_response(e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let store = JsonFileStore::open(&config.schedule_file);
    let state = Data::new(RwLock::new(Planner::new(store, config.variant)));
    let config = Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(config.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_settings)
            .service(api_get_schedule)
            .service(api_regenerate)
            .service(api_toggle_match)
            .service(api_reset)
            .service(api_progress)
            .service(api_export_csv)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
