use image_flip_rotate::{function_handler, init_thread_pool, Config, ExportRequest};
use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Read settings and size the Rayon pool at cold start (once per container lifecycle)
    let config = Config::from_env();
    init_thread_pool(config.workers);
    tracing::info!(
        source = %config.source.display(),
        output_dir = %config.output_dir.display(),
        workers = config.workers,
        "cold start"
    );

    let config = &config;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(ExportRequest::from_payload(event.payload), config)
            .await
            .map_err(Error::from)
    }))
    .await
}
