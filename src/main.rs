use std::sync::{Arc, Mutex};
use std::time::Instant;
use std::{fs, process, thread};
use itertools::Itertools;
use crossbeam_channel::bounded;
use crate::trie::Trie;

mod trie;

const DICTIONARY: &str = "dictionary.txt";
const QUERIES: [&str; 5] = ["notaword", "ucf", "no", "note", "corg"];
const PRINT_WORDS: bool = true;
const THREADS: usize = 4;

fn main() {
    let start = Instant::now();

    let text = match fs::read_to_string(DICTIONARY) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error opening file {DICTIONARY}: {err}");
            process::exit(1);
        }
    };
    let words = text.split_whitespace().collect_vec();
    if PRINT_WORDS {
        for &word in words.iter() {
            println!("{word}");
        }
    }

    let mut index = Trie::new();
    for &word in words.iter() {
        if let Err(err) = index.insert(word) {
            eprintln!("Skipping {word:?}: {err}");
        }
    }

    let (s, r) = bounded::<(usize, usize)>(QUERIES.len());
    let tasks = Arc::new(Mutex::new(0..QUERIES.len()));
    thread::scope(|scope| {
        for _ in 0..THREADS {
            let s = s.clone();
            let tasks = Arc::clone(&tasks);
            let index = &index;
            scope.spawn(move || loop {
                let task = tasks.lock().unwrap().next();
                let Some(position) = task else { break };

                let word = QUERIES[position];
                match index.occurrences(word) {
                    Ok(count) => s.send((position, count)).unwrap(),
                    Err(err) => eprintln!("Skipping query {word:?}: {err}"),
                }
            });
        }
    });
    drop(s);

    for (position, count) in r.iter().sorted() {
        println!("\t{} : {}", QUERIES[position], count);
    }

    println!("Indexed {} words in {:?}", words.len(), start.elapsed());
}
