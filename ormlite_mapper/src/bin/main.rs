use log::error;
use ormlite_mapper::{
	run,
	Opt,
};
use structopt::StructOpt;

fn main() {
	let opt = Opt::from_args();
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(opt.log_filter())).init();

	if let Err(e) = run(&opt) {
		error!("{}", e);
		std::process::exit(1);
	}
}
