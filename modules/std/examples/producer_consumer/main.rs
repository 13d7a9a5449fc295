//! Three producers feed a bounded queue while one consumer drains it.
//!
//! Run with: `cargo run --example producer_consumer`

use penstock_std_rs::StdMpmcQueue;

#[tokio::main]
async fn main() {
  let queue = StdMpmcQueue::bounded(4);

  let producers: Vec<_> = (0..3)
    .map(|producer| {
      let queue = queue.clone();
      tokio::spawn(async move {
        for sequence in 0..5 {
          let value = producer * 10 + sequence;
          queue.offer(value).await.expect("queue closed while producing");
          println!("producer {producer} deposited {value}");
        }
      })
    })
    .collect();

  let consumer = {
    let queue = queue.clone();
    tokio::spawn(async move {
      for _ in 0..15 {
        let value = queue.poll().await.expect("queue closed while consuming");
        println!("consumer withdrew {value}");
      }
    })
  };

  for producer in producers {
    producer.await.expect("producer task panicked");
  }
  consumer.await.expect("consumer task panicked");

  queue.close();
  println!("queue closed: {}", queue.is_closed());
}
