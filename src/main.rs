use pyprelude::order::{descending, max, min, reverse, sort, sort_by};
use pyprelude::ops::add;
use pyprelude::random::Random;
use pyprelude::range::{range, range_step};
use pyprelude::sequence::{Sequence, pair};
use pyprelude::{Error, print_values, println_values, vector};

fn main() -> Result<(), Error> {
    let vec: Sequence<i32> = vector![10, 20, 30, 40, 69, 20];

    for elem in &vec {
        print_values!(elem, "");
    }

    println_values!();

    for i in reverse(range(10)) {
        print_values!(i, "");
    }

    println_values!("\nWow, it printed this:", vec, ":)", 12.34);

    let max_num = max(&vec)?;
    println_values!("Largest element in vec:", max_num);

    let text_pair = pair("Min:", "Max:");
    let value_pair = pair(min(&vec)?, max(&vec)?);
    println_values!(text_pair.first, value_pair.first, text_pair.second, value_pair.second);

    let result = add(String::from("3"), "54");
    let result2 = add(2.0, 40.5);
    println_values!(result);
    println_values!(result2);

    println_values!("Unsorted:", vec);
    println_values!("Sorted:", sort(vec.clone()));
    println_values!("Sorted descending:", sort_by(vec.clone(), descending));

    println_values!("Evens, counting down:", range_step(10, -1, -2)?);

    let mut random = Random::seeded(69);
    println_values!("Shuffled:", random.shuffle(vec.clone()));
    println_values!("Dice roll:", random.uniform_int(1, 6)?);

    Ok(())
}
