// Root route handler.
//
// The response text doubles as the deployment-verification signal checked by
// the pipeline, so it must stay byte-for-byte identical.
pub async fn root() -> &'static str {
    "Hello World! This is v1 of my CI/CD application."
}
