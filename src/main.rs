use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use youreview::application::ports::AudioDownloader;
use youreview::application::services::{FileServer, Summarizer, VideoInfoFetcher};
use youreview::domain::AudioCodec;
use youreview::infrastructure::llm::ChatCompletionsClient;
use youreview::infrastructure::observability::{TracingConfig, init_tracing};
use youreview::infrastructure::youtube::{
    YtDlp, YtDlpAudioDownloader, YtDlpMetadataSource, YtDlpTranscriptSource,
};
use youreview::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    )
    .context("Failed to open log file")?;

    tokio::fs::create_dir_all(&settings.audio.output_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create audio output directory {}",
                settings.audio.output_dir.display()
            )
        })?;

    let yt_dlp = YtDlp::new(settings.yt_dlp.binary.clone());
    let codec = AudioCodec::new(&settings.audio.codec);

    let video_info_fetcher = Arc::new(VideoInfoFetcher::new(
        Arc::new(YtDlpMetadataSource::new(yt_dlp.clone())),
        Arc::new(YtDlpTranscriptSource::new(yt_dlp.clone())),
        settings.video.max_duration_seconds,
        settings.video.transcript_languages.clone(),
    ));

    let llm_client = Arc::new(ChatCompletionsClient::from_settings(&settings.llm));
    let summarizer = Arc::new(Summarizer::new(llm_client, &settings.llm.summary_language));

    let audio_downloader: Arc<dyn AudioDownloader> = Arc::new(YtDlpAudioDownloader::new(
        yt_dlp.clone(),
        settings.audio.output_dir.clone(),
        codec.clone(),
        settings.audio.quality.clone(),
    ));
    let file_server = Arc::new(FileServer::new(settings.audio.cleanup_grace_period()));

    tracing::info!(
        yt_dlp = %yt_dlp.binary(),
        model = %settings.llm.model,
        codec = %codec,
        max_duration_seconds = settings.video.max_duration_seconds,
        "Services configured"
    );

    let state = AppState {
        video_info_fetcher,
        summarizer,
        audio_downloader,
        file_server,
    };

    let router = create_router(state, &settings.cors);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
