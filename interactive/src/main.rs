use clap::Parser;

mod app;
mod args;

use app::App;
use args::Args;

fn main() {
    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    let app = match App::new(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    app.run();
}
