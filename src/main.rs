use anyhow::Result;
use clap::{Parser, Subcommand};
use grit::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "grit",
    version = "0.1.0",
    about = "A minimal content-addressable object store",
    long_about = "A minimal implementation of git's object database, written in Rust. \
    It stores immutable blobs and directory snapshots under content-derived keys \
    and rebuilds directory structure by recursively hashing objects into trees.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the decoded content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database",
        long_about = "This command hashes a file as a blob object and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "write-tree",
        about = "Snapshot the working directory into a tree object",
        long_about = "This command recursively stores the working directory as blob and tree objects \
        and prints the identity of the root tree."
    )]
    WriteTree,
    #[command(
        name = "ls-tree",
        about = "List the entries of a tree object",
        long_about = "This command lists the entries of a stored tree object in stored order. \
        It requires the SHA of the tree to be specified."
    )]
    LsTree {
        #[arg(long, help = "Print only entry names")]
        name_only: bool,
        #[arg(index = 1, help = "The tree SHA to list")]
        sha: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
                }
            };

            repository.init()?
        }
        Commands::CatFile { sha } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.cat_file(sha)?
        }
        Commands::HashObject { write, file } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.hash_object(file, *write)?
        }
        Commands::WriteTree => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.write_tree()?
        }
        Commands::LsTree { name_only, sha } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.ls_tree(sha, *name_only)?
        }
    }

    Ok(())
}
