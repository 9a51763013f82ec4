// Afsah Institute landing page - browser entry point (trunk, `--features csr`)

fn main() {
    afsah_landing::mount();
}
