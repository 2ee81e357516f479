fn main() -> anyhow::Result<()> {
    envreport::run()
}
