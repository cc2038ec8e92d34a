// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::io::{self, Write};
use std::time::Instant;

use fbdict::gallery::Gallery;
use fbdict::image::Bitmap;

const DEFAULT_DIR: &str = "saved-photos";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let dir = if args.len() > 1 {
        &args[1]
    } else {
        DEFAULT_DIR
    };

    let mut gallery = Gallery::new(dir)?;
    println!(
        "Gallery at {:?} with {} photos. Enter a command, HELP for help:",
        dir,
        gallery.count()
    );

    loop {
        let mut input = String::new();

        io::stdout().flush()?;
        io::stdin().read_line(&mut input)?;

        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        if let Some(command) = parts.first() {
            match *command {
                "SAVE" => {
                    // stand-in for a captured photo
                    let shade = (gallery.count() % 256) as u8;
                    let image = Bitmap::solid(64, 64, [shade, shade, shade, 255]);

                    let start = Instant::now();
                    match gallery.save(image) {
                        Ok(key) => println!("Saved {} in {:.2?}", key, start.elapsed()),
                        Err(e) => println!("Save failed: {}", e),
                    }
                }
                "LIST" => {
                    for key in gallery.sorted_keys() {
                        println!("{}", key);
                    }
                    println!("{} photos", gallery.count());
                }
                "SHOW" => {
                    if let Some(key) = parts.get(1) {
                        match gallery.photo(key) {
                            Some(image) => {
                                println!("{}: {}x{}", key, image.width, image.height)
                            }
                            None => println!("No photo {}", key),
                        }
                    } else {
                        println!("SHOW requires a key");
                    }
                }
                "DELETE" => {
                    if let Some(key) = parts.get(1) {
                        match gallery.delete(key) {
                            Ok(()) => println!("Deleted {}", key),
                            Err(e) => println!("Delete failed: {}", e),
                        }
                    } else {
                        println!("DELETE requires a key");
                    }
                }
                "CLEAR" => match gallery.clear_all() {
                    Ok(()) => println!("Cleared all photos"),
                    Err(e) => println!("Clear failed: {}", e),
                },
                "QUIT" => {
                    break;
                }
                "HELP" => {
                    println!("Commands:");
                    println!("SAVE");
                    println!("LIST");
                    println!("SHOW key");
                    println!("DELETE key");
                    println!("CLEAR");
                    println!("HELP");
                    println!("QUIT");
                }
                &_ => {
                    println!("Unknown command");
                }
            }
        }
    }

    Ok(())
}
