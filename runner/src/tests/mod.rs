use processor::{format_logs, simulate, Log};
use scheduler::Algorithm;

use std::env;
use std::fs;

mod fifo;

fn write_logs(folder: &str, name: &str, logs: &str) {
    fs::create_dir_all(format!("../outputs/{folder}")).unwrap();
    fs::write(format!("../outputs/{folder}/{name}.log"), logs).unwrap();
}

fn read_logs(folder: &str, name: &str) -> String {
    fs::read_to_string(format!("../outputs/{folder}/{name}.log")).unwrap()
}

fn run(folder: &str, name: &str, logs: &[Log]) {
    let output = format_logs(logs);

    if env::var("WRITE_OUTPUT").is_ok() {
        write_logs(folder, name, &output);
    } else {
        let reference = read_logs(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

fn simulation(input: &str, algorithm: Algorithm) -> Vec<Log> {
    simulate(input, algorithm).unwrap()
}
