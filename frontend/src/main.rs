use app_shell::AppShell;
use app_shell::zoon::start_app;

fn main() {
    start_app("app", AppShell::new);
}
