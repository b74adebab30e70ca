//! Version command implementation.

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() {
    println!("{NAME} {VERSION}");
    println!();
    println!("Executable digital twins from machine nameplates.");
    println!();
    println!("Build info:");
    println!("  Kernel:       snaptwin-kernel {}", snaptwin_kernel::version());
    println!("  Target:       {}", std::env::consts::ARCH);
    println!("  OS:           {}", std::env::consts::OS);
}
