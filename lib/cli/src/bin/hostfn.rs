use hostfn_cli::cli::hostfn_main;

fn main() {
    hostfn_main();
}
