use std::{sync::Arc, time::Duration};

use clap::{Args, ValueEnum};
use tokio::task::JoinSet;
use tracing::{debug, info};

use lang_tour::{
    closures::{fetch, make_adder, make_incrementer, perform_action, CompletionQueue},
    concurrency::{download_document, download_in_parallel, list_photos, TemperatureLogger},
    enums::{Direction, NetworkResponse},
    operators::{wrapping_decrement, wrapping_increment, BitReport, Vector2D},
    protocols::{
        begin_concert, count_kinds, sample_library, wish_happy_birthday, Car, City,
        CoffeeVendingMachine, Machine, MediaItem, Person, TextRepresentable, TicketMachine,
        Turnable, Vehicle,
    },
    strings::{char_at, prefix_before, EncodingViews},
    users::{load_users, StaticUserSource},
    Countdown, Stack,
};

#[derive(Args, Debug)]
pub struct StackArgs {
    #[arg(name = "ITEMS", required = true)]
    items: Vec<String>,
}

pub fn execute_stack(args: StackArgs) {
    let mut stack = Stack::new();
    for item in args.items {
        stack.push(item);
    }

    println!("count: {}", stack.count());
    if let Some(top) = stack.peek() {
        println!("peek: {}", top);
    }
    while let Some(item) = stack.pop() {
        println!("pop: {}", item);
    }
    println!("count: {}", stack.count());
}

#[derive(Args, Debug)]
pub struct CountdownArgs {
    #[arg(name = "START")]
    start: u32,
}

pub fn execute_countdown(args: CountdownArgs) {
    for number in Countdown::new(args.start) {
        println!("{}", number);
    }
}

pub fn execute_directions() {
    println!("Total directions: {}", Direction::ALL.len());
    for direction in Direction::ALL {
        println!("{}", direction);
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ResponseKind {
    Loading,
    Success,
    Failure,
}

#[derive(Args, Debug)]
pub struct ResponseArgs {
    #[arg(value_enum)]
    kind: ResponseKind,
    #[arg(long)]
    result: Option<String>,
    #[arg(long)]
    status: Option<u16>,
    #[arg(long)]
    message: Option<String>,
}

pub fn execute_response(args: ResponseArgs) -> anyhow::Result<()> {
    let response = match args.kind {
        ResponseKind::Loading => NetworkResponse::Loading,
        ResponseKind::Success => NetworkResponse::Success {
            result: args
                .result
                .unwrap_or_else(|| "Data successfully fetched.".into()),
        },
        ResponseKind::Failure => {
            let status_code = args.status.unwrap_or(500);
            if !(100..=599).contains(&status_code) {
                anyhow::bail!("{} is not an HTTP status code", status_code);
            }
            NetworkResponse::Failure {
                status_code,
                message: args
                    .message
                    .unwrap_or_else(|| "Internal server error.".into()),
            }
        }
    };

    println!("{}", response.message());
    Ok(())
}

#[derive(Args, Debug)]
pub struct VectorArgs {
    #[arg(allow_negative_numbers = true)]
    pub x1: f64,
    #[arg(allow_negative_numbers = true)]
    pub y1: f64,
    #[arg(allow_negative_numbers = true)]
    pub x2: f64,
    #[arg(allow_negative_numbers = true)]
    pub y2: f64,
}

pub fn execute_vector(args: VectorArgs) {
    let first = Vector2D::new(args.x1, args.y1);
    let second = Vector2D::new(args.x2, args.y2);

    let mut combined = first;
    combined += second;
    println!("sum: ({}, {})", combined.x, combined.y);

    let negated = -first;
    println!("negated: ({}, {})", negated.x, negated.y);
    println!("equal: {}", first == second);
}

#[derive(Args, Debug)]
pub struct BitsArgs {
    a: u8,
    b: u8,
}

pub fn execute_bits(args: BitsArgs) {
    let report = BitReport::new(args.a, args.b);
    println!("~a     = {:08b}", report.not_a);
    println!("a & b  = {:08b}", report.and);
    println!("a | b  = {:08b}", report.or);
    println!("a ^ b  = {:08b}", report.xor);
    println!("a << 2 = {:08b}", report.a_shl_2);
    println!("b >> 2 = {:08b}", report.b_shr_2);
    println!("a &+ 1 = {}", wrapping_increment(args.a));
    println!("b &- 1 = {}", wrapping_decrement(args.b));
}

#[derive(Args, Debug)]
pub struct StringsArgs {
    #[arg(name = "TEXT")]
    text: String,
}

pub fn execute_strings(args: StringsArgs) {
    let views = EncodingViews::of(&args.text);
    println!("utf8: {:?}", views.utf8);
    println!("utf16: {:?}", views.utf16);
    println!("scalars: {:?}", views.scalars);
    println!("c string: {:?}", views.c_string);

    if let (Some(first), Some(last)) = (char_at(&args.text, 0), char_at(&args.text, -1)) {
        println!("first: {}, last: {}", first, last);
    }
    println!("before ',': {}", prefix_before(&args.text, ','));
}

pub fn execute_closures() {
    let add_two = make_adder(2);
    println!("add_two(1) = {}", add_two(1));

    let mut by_ten = make_incrementer(10);
    let first = by_ten();
    let second = by_ten();
    println!("incrementer: {}, {}", first, second);

    for url in ["https://example.com", "example.com"] {
        fetch(
            url,
            |body| println!("success: {}", body),
            |status| println!("failure: {}", status),
        );
    }

    let mut queue = CompletionQueue::new();
    queue.push(|| println!("queued handler ran"));
    println!("registered {} handler(s)", queue.len());
    println!("ran {} handler(s)", queue.run_all());

    println!("{}", perform_action(|| 5 > 3));
}

pub fn execute_protocols() {
    let car = Car::default();
    println!(
        "{}: engine {}, {} km/h",
        car.brand(),
        car.engine(),
        car.speed()
    );

    let mut heading = Direction::East;
    heading.make_a_u_turn();
    println!("after a u-turn from east: {}", heading);

    let people = vec![
        Person {
            name: "John".into(),
            age: 30,
        },
        Person {
            name: "Mary".into(),
            age: 27,
        },
    ];
    println!("{}", people.text_description());
    println!("{}", wish_happy_birthday(&people[0]));
    println!(
        "{}",
        begin_concert(&City {
            name: "Pune".into(),
            latitude: 18.5,
            longitude: 73.8,
        })
    );

    println!("{}", CoffeeVendingMachine.dispatch());
    println!("{}", TicketMachine.dispatch());

    let library = sample_library();
    let (movies, songs) = count_kinds(&library);
    println!("library: {} movies, {} songs", movies, songs);
    for item in &library {
        let kind = if item.is_movie() { "movie" } else { "song" };
        println!("{} is a {}.", item.name(), kind);
    }
    for item in &library {
        if let Some(movie) = item.as_movie() {
            println!("{} is a movie directed by {}", movie.name, movie.director);
        } else if let MediaItem::Song(song) = item {
            println!("Song: {} by {}", song.name, song.artist);
        }
    }
}

#[derive(Args, Debug)]
pub struct PhotosArgs {
    #[arg(short, long, default_value = "Summer vacations")]
    gallery: String,
    /// Simulated download time for each file.
    #[arg(long, default_value_t = 200)]
    delay_ms: u64,
}

pub async fn execute_photos(args: PhotosArgs) -> anyhow::Result<()> {
    let delay = Duration::from_millis(args.delay_ms);
    let names = list_photos(&args.gallery).await;
    info!("Fetching {} photos from {}", names.len(), args.gallery);

    let (photos, document) = tokio::join!(
        download_in_parallel(names, delay),
        download_document(delay)
    );
    for photo in photos? {
        println!("fetched: {}", photo);
    }
    println!("{}", document);
    Ok(())
}

#[derive(Args, Debug)]
pub struct TempsArgs {
    #[arg(name = "LABEL")]
    pub label: String,
    #[arg(name = "READINGS", required = true, allow_negative_numbers = true)]
    pub readings: Vec<i32>,
}

pub async fn execute_temps(args: TempsArgs) -> anyhow::Result<()> {
    let mut readings = args.readings.into_iter();
    let Some(first) = readings.next() else {
        anyhow::bail!("at least one reading is required");
    };

    let logger = Arc::new(TemperatureLogger::new(args.label, first));
    let mut set = JoinSet::new();
    for reading in readings {
        let logger = Arc::clone(&logger);
        set.spawn(async move { logger.update(reading).await });
    }
    while let Some(res) = set.join_next().await {
        res?;
    }

    debug!("Measurements: {:?}", logger.measurements().await);
    println!("{} max: {}", logger.label(), logger.max().await);
    Ok(())
}

#[derive(Args, Debug)]
pub struct UsersArgs {
    #[arg(name = "URL")]
    url: String,
    /// Response body the canned source serves.
    #[arg(long, default_value = r#"[{"name":"John","age":30},{"name":"Mary","age":27}]"#)]
    body: String,
    /// Status code the canned source answers with.
    #[arg(long, default_value_t = 200)]
    status: u16,
}

pub async fn execute_users(args: UsersArgs) {
    let source = StaticUserSource::new(args.body).with_status(args.status);
    let users = load_users(&source, &args.url).await;
    if users.is_empty() {
        println!("No users loaded.");
    }
    for user in users {
        println!("{} ({})", user.name, user.age);
    }
}
