use open_meteo_sql::{ForecastRequest, MeteoSqlError, Reporter};
use std::env;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), MeteoSqlError> {
    env_logger::init();
    configure_polars_display();

    let reports = Reporter::new().run(&ForecastRequest::paris()).await?;
    for report in &reports {
        println!("{report}");
    }

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
