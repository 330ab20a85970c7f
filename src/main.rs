/// Binary entrypoint for the `greetings` executable.
///
/// All logic lives in the `greetings_lib` crate so unit tests can import the
/// library functions directly.
fn main() {
    greetings_lib::run();
}
