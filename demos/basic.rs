//! Basic example of using the Boggle board core

use boggle_core::{normalize, parse_solve_response, Grid, Randomizer, ResultsPanel};

fn main() {
    // Randomize a board
    println!("Randomizing a board...\n");
    let mut randomizer = Randomizer::new();
    let mut grid = Grid::new();
    randomizer.randomize_board(&mut grid);

    println!("Random board:");
    println!("{}", grid);

    // Clean up some user input
    println!("--- Normalizing input ---\n");
    for raw in ["q", "Q", "qu", "7", ""] {
        println!("{:?} -> {}", raw, normalize(raw));
    }

    // Parse a board from a string
    println!("\n--- Parsing a board from string ---\n");
    match Grid::from_string("catsdogs--------") {
        Ok(grid) => {
            println!("Parsed board:");
            println!("{}", grid);
            println!("Empty cells: {}", grid.empty_count());

            // The request body the solve service receives
            match grid.snapshot().to_json() {
                Ok(body) => println!("Request body: {}\n", body),
                Err(e) => println!("Could not encode request: {}\n", e),
            }
        }
        Err(e) => println!("Could not parse board: {}", e),
    }

    // Decode a response the way the client does
    println!("--- Decoding a response ---\n");
    match parse_solve_response(200, r#"["CAT","CATS","DOG","DOGS"]"#) {
        Ok(words) => {
            for line in ResultsPanel::new(&words).lines() {
                println!("{}", line);
            }
        }
        Err(e) => println!("{}", e.user_message()),
    }
    if let Err(e) = parse_solve_response(500, "server error") {
        println!("\nFailure notification: {}", e.user_message());
    }
}
