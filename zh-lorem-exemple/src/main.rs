use log::info;
use zh_lorem_core::model::corpus::Corpus;
use zh_lorem_core::{generate, GenerationParams, Generator, LoremError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Default parameters: 3 sentences of about 8 words, built-in corpus
    println!("{}", generate(&GenerationParams::default())?);

    // Parameters may be integers or numeric-looking text
    let params = GenerationParams::new("5", 4);
    println!("{}", generate(&params)?);

    // Unparseable values fall back to their defaults (3 sentences here)
    let params = GenerationParams::new("abc", "12");
    println!("{}", generate(&params)?);

    // Zero (or negative) sentences gives an empty paragraph
    let empty = generate(&GenerationParams::new(0, 8))?;
    info!("zero sentences -> {:?}", empty);

    // Load extra word lists from the "data" directory if present
    match Generator::from_folder("./data") {
        Ok(generator) => {
            info!("loaded corpora {:?}", generator.get_corpus_names());
            println!("{}", generator.generate(&GenerationParams::new(2, 3))?);
        }
        Err(e) => info!("no extra corpora: {e}"),
    }

    // A corpus smaller than the sampled sentence length is a configuration error
    let tiny = Generator::new(Corpus::from_words("tiny", ["春", "夏", "秋"])?);
    match tiny.generate(&GenerationParams::new(1, 8)) {
        Err(LoremError::InvalidSampleSize { requested, available }) => {
            println!("Cannot sample {requested} words from {available}, as expected")
        }
        Err(e) => return Err(e.into()),
        Ok(_) => println!("Should not happen"),
    }

    Ok(())
}
