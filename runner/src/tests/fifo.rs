use core::module_path;
use function_name::named;
use scheduler::Algorithm;

use super::{run, simulation};

#[test]
#[named]
pub fn two_processes() {
    let logs = simulation("1 2|1|2|0 3|0 2", Algorithm::Fifo);

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &logs,
    );
}

#[test]
#[named]
pub fn two_processors() {
    let logs = simulation("1 2|2|3|0 3|0 2|1 1", Algorithm::Fifo);

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &logs,
    );
}
