// formats values the way the reference demo driver prints them, five per line
#[allow(dead_code)]
pub fn driver_lines<T, F>(count: usize, mut next: F, fmt_value: fn(T) -> String) -> Vec<String>
where
    F: FnMut() -> T,
{
    let mut res = Vec::with_capacity(count / 5);
    let mut line = String::new();

    for i in 0..count {
        line.push_str(&fmt_value(next()));
        line.push(' ');

        if i % 5 == 4 {
            res.push(line.trim_end().to_string());
            line.clear();
        }
    }

    res
}

// printf("%10lu ")
#[allow(dead_code)]
pub fn fmt_int<T: std::fmt::Display>(x: T) -> String {
    format!("{:>10}", x)
}

// printf("%10.8f ")
#[allow(dead_code)]
pub fn fmt_real(x: f64) -> String {
    format!("{:10.8}", x)
}
