fn main() -> anyhow::Result<()> {
    raspilapse_dashboard_lib::run()
}
