//! `vocab-gaps` binary: see [`conlang_vocab::cli`].

fn main() -> anyhow::Result<()> {
    conlang_vocab::cli::run()
}
