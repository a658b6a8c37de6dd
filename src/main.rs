fn main() -> anyhow::Result<()> {
    codelist_gen::run()
}
