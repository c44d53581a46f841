use ballsaver::Config;

fn main() {
    env_logger::init();

    if let Err(e) = ballsaver::run(Config::default()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
