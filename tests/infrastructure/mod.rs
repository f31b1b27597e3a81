mod tracing_config_test;
mod webvtt_test;
mod yt_dlp_test;
