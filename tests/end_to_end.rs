use std::{fs, io::Cursor, num::NonZeroUsize, path::Path};

use langid::{corpus, prompt, AppConfig, AppErr};
use ml_core::{MlError, Model};
use tempfile::TempDir;

fn write_doc(root: &Path, label: &str, name: &str, text: &str) {
    let dir = root.join(label);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), text).unwrap();
}

fn toy_corpus() -> TempDir {
    let root = TempDir::new().unwrap();
    let path = root.path();

    write_doc(
        path,
        "italian",
        "1.txt",
        "oggi il tempo e molto bello e andiamo\na passeggiare nel parco con i bambini\n",
    );
    write_doc(
        path,
        "italian",
        "2.txt",
        "lei pensava che la casa sulla collina fosse la cosa piu bella del mondo",
    );
    write_doc(
        path,
        "italian",
        "3.txt",
        "sono andati al mercato per comprare pane e formaggio per la domenica",
    );
    write_doc(
        path,
        "english",
        "1.txt",
        "the weather is nice today and we will walk\nthrough the park with the children\n",
    );
    write_doc(
        path,
        "english",
        "2.txt",
        "she thought that the house on the hill was the most beautiful thing in the world",
    );
    write_doc(
        path,
        "english",
        "3.txt",
        "they went to the market to buy bread and cheese for the weekend",
    );
    write_doc(
        path,
        "german",
        "1.txt",
        "das wetter ist heute sehr schoen und wir gehen\nmit den kindern spazieren\n",
    );
    write_doc(
        path,
        "german",
        "2.txt",
        "sie dachte dass das haus auf dem huegel das schoenste der welt sei",
    );
    write_doc(
        path,
        "german",
        "3.txt",
        "wir brauchen noch zwei kilo kartoffeln und ein stueck kuchen",
    );
    fs::write(path.join("README"), "not a language").unwrap();

    root
}

fn config_for(root: &Path) -> AppConfig {
    AppConfig {
        corpus_dir: root.to_path_buf(),
        learning_rate: 0.5,
        epochs: NonZeroUsize::new(20).unwrap(),
        ..AppConfig::default()
    }
}

#[test]
fn loads_labels_in_directory_order() {
    let root = toy_corpus();

    let corpus = corpus::load(root.path()).unwrap();

    assert_eq!(corpus.len(), 9);
    assert_eq!(corpus.labels(), ["english", "german", "italian"]);
}

#[test]
fn trains_and_answers_the_prompt() {
    let root = toy_corpus();
    let config = config_for(root.path());
    let corpus = corpus::load(&config.corpus_dir).unwrap();

    let net = langid::train(&config, &corpus).unwrap();
    assert_eq!(net.labels().iter().collect::<Vec<_>>(), ["english", "german", "italian"]);

    let input = Cursor::new(
        "the children thought that the weather was nice\n\
         wir gehen heute mit dem hund zum kuchen\n\
         la casa e molto bella e il pane e buono\n\
         q\n",
    );
    let mut output = Vec::new();
    let classified = prompt::run(&net, input, &mut output, &config.quit_token).unwrap();

    let output = String::from_utf8(output).unwrap();
    let answers: Vec<_> = output
        .lines()
        .filter_map(|line| line.strip_prefix("The language is: "))
        .collect();
    assert_eq!(classified, 3);
    assert_eq!(answers, ["english", "german", "italian"]);
}

#[test]
fn empty_corpus_is_rejected() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("english")).unwrap();

    let err = corpus::load(root.path()).unwrap_err();

    assert!(matches!(err, AppErr::EmptyCorpus { .. }));
}

#[test]
fn missing_corpus_is_an_io_error() {
    let root = TempDir::new().unwrap();

    let err = corpus::load(&root.path().join("nope")).unwrap_err();

    assert!(matches!(err, AppErr::Io { .. }));
}

#[test]
fn too_few_classes_is_rejected() {
    let root = toy_corpus();
    let config = AppConfig {
        num_classes: NonZeroUsize::new(2),
        ..config_for(root.path())
    };
    let corpus = corpus::load(root.path()).unwrap();

    let err = langid::train(&config, &corpus).unwrap_err();

    assert!(matches!(
        err,
        AppErr::Ml(MlError::RegistryFull { capacity: 2 })
    ));
}

#[test]
fn spare_classes_stay_untrained() {
    let root = toy_corpus();
    let config = AppConfig {
        num_classes: NonZeroUsize::new(5),
        ..config_for(root.path())
    };
    let corpus = corpus::load(root.path()).unwrap();

    let net = langid::train(&config, &corpus).unwrap();

    assert_eq!(net.labels().len(), 3);
    assert_eq!(net.labels().capacity(), 5);
    for class in 3..5 {
        assert!(net.model().row(class).unwrap().iter().all(|&w| w == 0.0));
    }
}
