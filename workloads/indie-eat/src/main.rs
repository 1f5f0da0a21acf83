fn main() {
    indie_eat::start();
}
