use adder::{
    cli::{dispatch, Cli},
    AddError,
};
use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(error) = dispatch(cli) {
        // オーバーフローはレポーターが報告済み
        if error.downcast_ref::<AddError>().is_none() {
            eprintln!("❌ エラー: {error:#}");
        }
        std::process::exit(1);
    }
}
