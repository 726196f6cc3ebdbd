fn main() -> anyhow::Result<()> {
    quiz_terminal::run()
}
