use miette::Result;

/// Main entry point for the tortoise-hare CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    tortoise_hare::run()
}
