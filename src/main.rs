use average::{calculate_average, write_report};

fn main() -> average::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let data = [1, 2, 3, 4, 5];
    let avg = calculate_average(&data)?;

    log::debug!("averaged {data:?}");

    write_report(&mut std::io::stdout().lock(), avg)
}
