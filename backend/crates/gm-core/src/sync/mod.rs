pub mod ingestor;
