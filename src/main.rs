use diagsat::{diagnose,Circuit,Document};

fn main()->Result<(),Box<dyn std::error::Error>> {
    let path = match std::env::args().nth(1) {
	Some(p) => p,
	None => {
	    eprintln!("usage: diagnose CIRCUIT_FILE");
	    std::process::exit(2);
	}
    };
    let text = std::fs::read_to_string(&path)?;
    let circuit = Circuit::parse(&Document::new(&text))?;
    let d = diagnose(&circuit)?;
    if d.minimal_conflicts.is_empty() {
	println!("This circuit works correctly, there are no faulty components!");
	return Ok(());
    }
    println!("Minimal conflict sets: {:?}",d.minimal_conflicts);
    println!("Hitting sets: {:?}",d.hitting_sets);
    println!("Minimal hitting sets: {:?}",d.minimal_hitting_sets);
    Ok(())
}
