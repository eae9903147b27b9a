use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleet_console::config::environment::EnvironmentConfig;
use fleet_console::console::roster::FleetRoster;
use fleet_console::console::{BusConsole, RequestBoard};
use fleet_console::middleware;
use fleet_console::routes;
use fleet_console::state::AppState;
use fleet_console::store::{self, FleetSnapshot};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚌 Fleet Console - Bus Fleet Management Backend");
    info!("===============================================");

    let env_config = EnvironmentConfig::default();
    let (bus_store, request_store) = store::build_stores(&env_config);

    // Carga inicial de ambas vistas. Un backend que no responde degrada
    // a los datos de muestra, nunca impide el arranque.
    let fleet = match bus_store.load_fleet().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("❌ Error cargando la flota, usando datos de muestra: {}", e);
            FleetSnapshot {
                active: store::sample::sample_buses(),
                archived: Vec::new(),
            }
        }
    };
    let requests = match request_store.fetch_requests().await {
        Ok(requests) => requests,
        Err(e) => {
            error!("❌ Error cargando solicitudes, usando datos de muestra: {}", e);
            store::sample::sample_requests()
        }
    };

    info!(
        "📋 Flota cargada: {} activos, {} archivados, {} solicitudes",
        fleet.active.len(),
        fleet.archived.len(),
        requests.len()
    );

    let app_state = AppState::new(
        env_config.clone(),
        bus_store,
        request_store,
        BusConsole::new(FleetRoster::new(fleet.active, fleet.archived)),
        RequestBoard::new(requests),
    );

    let cors = if env_config.is_development() {
        middleware::cors::cors_middleware()
    } else {
        middleware::cors::cors_middleware_with_origins(env_config.cors_origins.clone())
    };

    let app = routes::create_api_router(app_state).layer(cors);

    let addr: SocketAddr = format!("{}:{}", env_config.host, env_config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/login - Login (solo admins)");
    info!("   POST /api/auth/logout - Logout");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("🚌 Endpoints - Buses:");
    info!("   GET  /api/buses - Listar buses (filtro/orden/página)");
    info!("   POST /api/buses - Registrar bus");
    info!("   GET  /api/buses/:id - Obtener bus");
    info!("   PUT  /api/buses/view - Cambiar colección visible");
    info!("   POST /api/buses/archive - Archivar buses");
    info!("   POST /api/buses/unarchive - Restaurar buses");
    info!("   POST /api/buses/delete - Eliminar buses archivados");
    info!("   POST /api/buses/:id/detail - Abrir detalle");
    info!("   GET  /api/buses/selection - Selección actual");
    info!("📨 Endpoints - Solicitudes:");
    info!("   GET  /api/requests - Solicitudes pendientes");
    info!("   PATCH /api/requests/:id/status - Aprobar/rechazar");
    info!("   POST /api/requests/batch-status - Acción por lote");
    info!("   POST /api/requests/:id/detail - Abrir detalle");

    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
