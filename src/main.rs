use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use vehicle_service_shop::config::environment::EnvironmentConfig;
use vehicle_service_shop::routes::create_app;
use vehicle_service_shop::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🔧 Vehicle Service Shop - API de órdenes de trabajo");
    info!("==================================================");

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {}", e);
            return Err(anyhow::anyhow!("Error de configuración: {}", e));
        }
    };

    if config.is_production() && config.cors_origins.is_empty() {
        warn!("⚠️ CORS_ORIGINS vacío en producción, se permiten todos los orígenes");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::in_memory(config)
        .map_err(|e| anyhow::anyhow!("Error inicializando el estado: {}", e))?;
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/login - Login del personal");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("👤 Endpoints - Customers:");
    info!("   POST /api/customers - Registrar cliente");
    info!("   GET  /api/customers - Listar clientes");
    info!("   GET  /api/customers/:id - Obtener cliente");
    info!("   PUT  /api/customers/:id - Actualizar cliente");
    info!("🚗 Endpoints - Vehicles:");
    info!("   POST /api/vehicles - Registrar vehículo");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("📦 Endpoints - Inventory:");
    info!("   POST /api/inventory - Registrar repuesto");
    info!("   GET  /api/inventory - Listar inventario");
    info!("   GET  /api/inventory/:id - Obtener repuesto");
    info!("   PUT  /api/inventory/:id/stock - Ajustar stock");
    info!("📋 Endpoints - Work orders:");
    info!("   POST /api/work-orders/quote - Calcular totales");
    info!("   POST /api/work-orders - Crear orden de trabajo");
    info!("   GET  /api/work-orders - Listar órdenes");
    info!("   GET  /api/work-orders/:id - Obtener orden");
    info!("   PUT  /api/work-orders/:id/status - Cambiar estado");
    info!("   PUT  /api/work-orders/:id/pricing - Recalcular precio");
    info!("📊 Endpoints - Dashboard:");
    info!("   GET  /api/dashboard/stats - Estadísticas del taller");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
